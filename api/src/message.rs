use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const DEFAULT_MAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// provider credentials
//
// these are public by construction (they ship in the wasm bundle), the provider
// restricts them by origin instead
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MailEndpoint {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

fn default_endpoint() -> String {
    String::from(DEFAULT_MAIL_ENDPOINT)
}

// one contact form submission, as handed over by the form controller
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SendMessageReq {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
    pub recipient: String,
}

// the provider's template parameters use its own naming, which we keep out of the rest
// of the crate
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
}

#[derive(Debug, Serialize)]
struct ProviderReq<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl<'a> ProviderReq<'a> {
    fn new(endpoint: &'a MailEndpoint, req: &'a SendMessageReq) -> Self {
        ProviderReq {
            service_id: &endpoint.service_id,
            template_id: &endpoint.template_id,
            user_id: &endpoint.public_key,
            template_params: TemplateParams {
                from_name: &req.sender_name,
                from_email: &req.sender_email,
                subject: &req.subject,
                message: &req.message,
                to_email: &req.recipient,
            },
        }
    }
}

// send a message through the provider
//
// the response body is not consumed; any non-2xx status is an error.  there is no retry
// and no timeout beyond what the browser's fetch imposes
#[instrument(level=Level::DEBUG, skip(endpoint, req), fields(subject = %req.subject))]
pub async fn send_message(endpoint: &MailEndpoint, req: &SendMessageReq) -> anyhow::Result<()> {
    let body = ProviderReq::new(endpoint, req);

    let resp = Request::post(&endpoint.endpoint).json(&body)?.send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "mail provider returned {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    debug!("message accepted by provider");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> MailEndpoint {
        MailEndpoint {
            endpoint: default_endpoint(),
            service_id: String::from("service_abc"),
            template_id: String::from("template_xyz"),
            public_key: String::from("pk_123"),
        }
    }

    #[test]
    fn provider_payload_uses_template_names() {
        let endpoint = endpoint();
        let req = SendMessageReq {
            sender_name: String::from("Ada"),
            sender_email: String::from("ada@example.com"),
            subject: String::from("Hello"),
            message: String::from("A longer message body"),
            recipient: String::from("owner@example.com"),
        };

        let value = serde_json::to_value(ProviderReq::new(&endpoint, &req)).unwrap();

        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_id"], "template_xyz");
        assert_eq!(value["user_id"], "pk_123");
        assert_eq!(value["template_params"]["from_name"], "Ada");
        assert_eq!(value["template_params"]["from_email"], "ada@example.com");
        assert_eq!(value["template_params"]["subject"], "Hello");
        assert_eq!(value["template_params"]["message"], "A longer message body");
        assert_eq!(value["template_params"]["to_email"], "owner@example.com");
    }

    #[test]
    fn endpoint_defaults_when_omitted() {
        let parsed: MailEndpoint = toml::from_str(
            r#"
            service_id = "s"
            template_id = "t"
            public_key = "k"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.endpoint, DEFAULT_MAIL_ENDPOINT);
    }
}
