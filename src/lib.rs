pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod rounding;
        pub mod timestamp;
    }
}

pub mod modules {
    pub mod equipment {
        pub mod core {
            pub mod active_flag;
            pub mod intervals;
            pub mod records;
            pub mod summary;
            pub mod trend;
            pub mod utilization;
            pub mod window;
        }
        pub mod use_cases {
            pub mod date_range;
            pub mod errors;
            pub mod get_equipment_summaries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_equipment_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_utilization_overview {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_map_data {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod equipment_store;
                pub mod in_memory;
                pub mod supabase;
            }
        }
    }
}

pub mod shell;
