pub mod download_ips;
pub mod health_check;
