mod ttl_table_test;
