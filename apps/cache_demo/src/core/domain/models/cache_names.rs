pub const USERS: &str = "users";
pub const ORDERS: &str = "orders";
pub const ORDER_COUNTS: &str = "order_counts";
pub const PRODUCTS: &str = "products";
