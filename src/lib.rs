pub mod shared {
    pub mod infrastructure {
        pub mod state_store;
    }
}

pub mod modules {
    pub mod names {
        pub mod core {
            pub mod name_event;
            pub mod occurrence;
        }
        pub mod use_cases {
            pub mod count_name_occurrence {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod subscribe_to_names {
                pub mod subscription;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
