pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod seller {
    pub mod repository;
}
