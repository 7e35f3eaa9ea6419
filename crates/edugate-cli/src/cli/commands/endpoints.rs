//! Endpoint listing.

use edugate_core::config::Config;
use edugate_core::endpoints::Endpoints;

pub fn list(config: &Config) {
    let endpoints = Endpoints::from_config(config);
    println!("Base URL: {}", endpoints.base_url());
    for endpoint in endpoints.named() {
        println!("  {:<22} {}", endpoint.name, endpoint.url);
    }
}
