use crate::config::GreeterConfig;
use crate::errors::Result;
use crate::event::{GreetingBody, RequestEvent, Response};

pub const NAME_PARAM: &str = "name";

/// Turns one request event into a greeting response.
///
/// Holds only immutable configuration, so a single instance can serve any
/// number of invocations, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct Greeter {
    config: GreeterConfig,
}

impl Greeter {
    pub fn new(config: GreeterConfig) -> Self {
        Self { config }
    }

    /// Always answers 200 with `{"message": "<greeting> <name>"}`.
    pub fn greet(&self, event: &RequestEvent) -> Result<Response> {
        let name = effective_name(event, &self.config.fallback_name);
        Response::ok_json(&GreetingBody {
            message: format!("{} {}", self.config.greeting, name),
        })
    }
}

/// The `name` query parameter when it is present and non-empty, else `fallback`.
///
/// An empty `name` counts as missing. A whitespace-only one does not.
pub fn effective_name<'a>(event: &'a RequestEvent, fallback: &'a str) -> &'a str {
    match event.query_param(NAME_PARAM) {
        Some(name) if !name.is_empty() => name,
        _ => fallback,
    }
}

/// Greets with the default configuration.
pub fn handle(event: &RequestEvent) -> Result<Response> {
    Greeter::default().greet(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(response: &Response) -> String {
        let body: GreetingBody = serde_json::from_str(&response.body).unwrap();
        body.message
    }

    #[test]
    fn test_no_params() {
        let response = handle(&RequestEvent::default()).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(message(&response), "Hello Nobody");
    }

    #[test]
    fn test_params_without_name() {
        let event = RequestEvent::default().with_query_param("lang", "en");
        assert_eq!(message(&handle(&event).unwrap()), "Hello Nobody");
    }

    #[test]
    fn test_named() {
        let event = RequestEvent::default().with_query_param("name", "Ada");
        let response = handle(&event).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Hello Ada"}"#);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let event = RequestEvent::default().with_query_param("name", "");
        assert_eq!(message(&handle(&event).unwrap()), "Hello Nobody");
    }

    #[test]
    fn test_whitespace_name_is_kept() {
        let event = RequestEvent::default().with_query_param("name", " ");
        assert_eq!(message(&handle(&event).unwrap()), "Hello  ");
    }

    #[test]
    fn test_name_is_json_escaped() {
        let event = RequestEvent::default().with_query_param("name", "\"Bobby\"\n</script>");
        let response = handle(&event).unwrap();

        assert_eq!(
            response.body,
            r#"{"message":"Hello \"Bobby\"\n</script>"}"#
        );
        assert_eq!(message(&response), "Hello \"Bobby\"\n</script>");
    }

    #[test]
    fn test_name_lookup_is_case_sensitive() {
        let event = RequestEvent::default().with_query_param("Name", "Ada");
        assert_eq!(message(&handle(&event).unwrap()), "Hello Nobody");
    }

    #[test]
    fn test_custom_config() {
        let greeter = Greeter::new(GreeterConfig {
            greeting: "Hi".to_string(),
            fallback_name: "stranger".to_string(),
        });

        assert_eq!(message(&greeter.greet(&RequestEvent::default()).unwrap()), "Hi stranger");
        let event = RequestEvent::default().with_query_param("name", "Ada");
        assert_eq!(message(&greeter.greet(&event).unwrap()), "Hi Ada");
    }

    #[test]
    fn test_effective_name() {
        let event = RequestEvent::default().with_query_param("name", "Linus");
        assert_eq!(effective_name(&event, "Nobody"), "Linus");
        assert_eq!(effective_name(&RequestEvent::default(), "Nobody"), "Nobody");
    }
}
