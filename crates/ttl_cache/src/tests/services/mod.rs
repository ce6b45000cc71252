mod registry_builder_test;
