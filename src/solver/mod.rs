pub mod consistency;
pub mod domains;
pub mod engine;
pub mod stats;
pub mod work_list;
