pub mod application {
    pub mod media {
        pub mod upload_batch;
    }
    pub mod product {
        pub mod add;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod media {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod upload_batch;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
        }
    }
    pub mod seller {
        pub mod repository;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
