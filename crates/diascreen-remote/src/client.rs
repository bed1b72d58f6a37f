use ureq::Agent;

/// Build the HTTP agent shared by every request.
///
/// Non-2xx statuses come back as ordinary responses so the flows can read
/// the service's message out of the body. Timeouts are left to the
/// transport defaults.
pub fn build_agent() -> Agent {
    let config = Agent::config_builder().http_status_as_error(false).build();
    Agent::new_with_config(config)
}
