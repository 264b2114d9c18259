//! Blocking HTTP client for the answer service.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    domain::events::AnswerReceived,
    infra::{config::ServiceConfig, error::AppError},
    usecases::{
        probe_health::{HealthSource, HealthSourceError},
        submit_question::{AnswerSource, AskRequest, AskSourceError},
    },
};

use super::wire::{AnswerReply, QuestionPayload};

#[derive(Debug)]
pub struct AnswerServiceClient {
    http: Client,
    base_url: String,
}

impl AnswerServiceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(AppError::HttpClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl AnswerSource for AnswerServiceClient {
    fn ask(&self, request: &AskRequest) -> Result<AnswerReceived, AskSourceError> {
        let payload = QuestionPayload::from(request);
        let response = self
            .http
            .post(self.endpoint("ask"))
            .json(&payload)
            .send()
            .map_err(|error| AskSourceError::Transport {
                details: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskSourceError::Http {
                status: status.as_u16(),
            });
        }

        let reply: AnswerReply = response.json().map_err(|error| AskSourceError::Decode {
            details: error.to_string(),
        })?;

        Ok(reply.into_domain())
    }
}

impl HealthSource for AnswerServiceClient {
    fn check_health(&self) -> Result<(), HealthSourceError> {
        let response = self.http.get(self.endpoint("health")).send().map_err(
            |error| HealthSourceError::Transport {
                details: error.to_string(),
            },
        )?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(HealthSourceError::Http {
                status: status.as_u16(),
            })
        }
    }
}
