pub mod core {
    pub mod config;
    pub mod error;
    pub mod tracing_init;
}

pub mod api {
    pub mod client;
}

pub mod models {
    pub mod user;
}

pub mod report {
    pub mod render;
    pub mod writer;
}

pub mod pipeline;
