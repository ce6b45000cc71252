pub mod find_product_use_case;
pub mod find_user_use_case;
pub mod list_orders_use_case;

pub use self::find_product_use_case::FindProductUseCase;
pub use self::find_user_use_case::FindUserUseCase;
pub use self::list_orders_use_case::ListOrdersUseCase;
