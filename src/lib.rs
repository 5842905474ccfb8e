// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - The binary in shell/main.rs wires adapters into the cart store.
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod cart {
        pub mod decide;
        pub mod product;
        pub mod state;
    }
    pub mod ports;
}

pub mod application {
    pub mod cart_store;
    pub mod errors;
    pub mod notifications;
    pub mod queries {
        pub mod cart_view;
        pub mod price_format;
    }
}

pub mod adapters {
    pub mod file {
        pub mod json_snapshot_store;
    }
    pub mod http {
        pub mod storefront_api;
    }
    pub mod in_memory {
        pub mod in_memory_notifier;
        pub mod in_memory_snapshot_store;
        pub mod in_memory_storefront;
    }
    pub mod inbound {
        pub mod http;
    }
    pub mod tracing_notifier;
}

pub mod shell;
