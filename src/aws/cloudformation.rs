use crate::{
    error::{Error, Result},
    properties::Tag,
    stack::{StackClient, StackRequest, StackStatus},
};
use async_trait::async_trait;
use aws_sdk_cloudformation::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata},
    types::{self, Capability, Parameter},
};

#[derive(Debug, Clone)]
pub struct AwsStackClient {
    client: Client,
}

impl AwsStackClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

/// CloudFormation answers a describe for an unknown stack with a
/// `ValidationError` saying "Stack with id X does not exist"
#[inline]
fn is_missing_stack(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some("ValidationError") && message.is_some_and(|m| m.contains("does not exist"))
}

fn parameters(request: &StackRequest) -> Vec<Parameter> {
    request
        .parameters
        .iter()
        .map(|(key, value)| {
            Parameter::builder()
                .parameter_key(key)
                .parameter_value(value)
                .build()
        })
        .collect()
}

fn capabilities(request: &StackRequest) -> Vec<Capability> {
    request
        .capabilities
        .iter()
        .map(|c| Capability::from(c.as_str()))
        .collect()
}

fn tags(tags: &[Tag]) -> Vec<types::Tag> {
    tags.iter()
        .map(|tag| types::Tag::builder().key(&tag.key).value(&tag.value).build())
        .collect()
}

/// Status of the first described stack, a stack without one counts as absent
fn first_status(stacks: &[types::Stack]) -> Option<StackStatus> {
    stacks
        .first()
        .and_then(types::Stack::stack_status)
        .map(|status| StackStatus::new(status.as_str()))
}

#[async_trait]
impl StackClient for AwsStackClient {
    async fn describe_stack(&self, stack_name: &str) -> Result<Option<StackStatus>> {
        match self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
        {
            Ok(output) => Ok(first_status(output.stacks())),
            Err(e) => {
                if let Some(service_error) = e.as_service_error()
                    && is_missing_stack(service_error.code(), service_error.message())
                {
                    return Ok(None);
                }

                Err(Error::Describe {
                    stack: stack_name.to_string(),
                    message: DisplayErrorContext(&e).to_string(),
                })
            }
        }
    }

    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        let create_error = |message: String| Error::CreateStack {
            stack: request.stack_name.clone(),
            message,
        };

        let output = self
            .client
            .create_stack()
            .stack_name(&request.stack_name)
            .template_url(&request.template_url)
            .set_parameters(Some(parameters(request)))
            .set_capabilities(Some(capabilities(request)))
            .set_tags(Some(tags(&request.tags)))
            .send()
            .await
            .map_err(|e| create_error(DisplayErrorContext(&e).to_string()))?;

        Ok(output.stack_id().map(ToString::to_string))
    }

    async fn update_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        let update_error = |message: String| Error::UpdateStack {
            stack: request.stack_name.clone(),
            message,
        };

        let output = self
            .client
            .update_stack()
            .stack_name(&request.stack_name)
            .template_url(&request.template_url)
            .set_parameters(Some(parameters(request)))
            .set_capabilities(Some(capabilities(request)))
            .set_tags(Some(tags(&request.tags)))
            .send()
            .await
            .map_err(|e| update_error(DisplayErrorContext(&e).to_string()))?;

        Ok(output.stack_id().map(ToString::to_string))
    }
}
