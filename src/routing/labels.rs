//! Traefik label synthesis

use super::config::RoutingConfig;

/// Label enabling Traefik for the service
pub const TRAEFIK_ENABLE: &str = "traefik.enable=true";

/// Build the three routing labels for a service
///
/// Always exactly three labels in a fixed order: the enable flag, the router
/// rule (host + path prefix), and the load balancer port. Field values are
/// interpolated verbatim, empty or not.
pub fn routing_labels(config: &RoutingConfig) -> Vec<String> {
    vec![
        TRAEFIK_ENABLE.to_string(),
        format!(
            "traefik.http.routers.{}.rule=Host(`{}`) && PathPrefix(`{}`)",
            config.service_name, config.rule, config.path
        ),
        format!(
            "traefik.http.services.{}.loadbalancer.server.port={}",
            config.service_name, config.port
        ),
    ]
}
