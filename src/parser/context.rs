//! Parse context and line state machine
//!
//! All working state lives in one `ParseContext` value threaded through the
//! line loop: the receiver state machine, the condition stack, header
//! fields, and the accumulated messages. There is no ambient state beyond
//! the lazily compiled grammar patterns.
//!
//! States: `AwaitingHeader` -> `AwaitingBodyOpen` -> `InBody`, where
//! `InBody` holds until end of input. The header attribute bracket may span
//! several lines, tracked by `CollectingHeader`.

use super::conditions::ConditionStack;
use super::error::ParseError;
use super::grammar::{HEADER_ATTRIBUTE, MESSAGE_LINE, RECEIVER_OPEN};
use super::options::{self, MessageOptions};
use super::parameters::{parse_attribute_list, parse_parameter_list};
use crate::model::{
    FeatureGate, Message, MessageReceiver, Parameter, ProcessRole, DEFAULT_NAMESPACE,
};

#[derive(Debug)]
enum ReceiverState {
    AwaitingHeader,
    /// Inside a header attribute bracket that has not closed yet.
    CollectingHeader { pending: String },
    AwaitingBodyOpen,
    InBody,
}

#[derive(Debug)]
pub(crate) struct ParseContext {
    state: ReceiverState,
    conditions: ConditionStack,
    namespace: String,
    destination: Option<String>,
    superclass: Option<String>,
    receiver_attributes: Option<Vec<String>>,
    enabled_by: Option<FeatureGate>,
    dispatched_from: Option<ProcessRole>,
    dispatched_to: Option<ProcessRole>,
    shared_preferences_needs_connection: bool,
    master_condition: Option<String>,
    messages: Vec<Message>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self {
            state: ReceiverState::AwaitingHeader,
            conditions: ConditionStack::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            destination: None,
            superclass: None,
            receiver_attributes: None,
            enabled_by: None,
            dispatched_from: None,
            dispatched_to: None,
            shared_preferences_needs_connection: false,
            master_condition: None,
            messages: Vec::new(),
        }
    }

    /// Process one trimmed input line.
    pub fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        if line.is_empty() {
            return Ok(());
        }
        if line.starts_with('#') {
            return self.conditions.directive(line);
        }

        match self.state {
            ReceiverState::AwaitingHeader | ReceiverState::AwaitingBodyOpen => {
                self.process_preamble_line(line)
            }
            ReceiverState::CollectingHeader { .. } => self.collect_header_line(line),
            ReceiverState::InBody => self.process_body_line(line),
        }
    }

    /// Finalize into the receiver model at end of input.
    pub fn finish(self) -> Result<MessageReceiver, ParseError> {
        let destination = self
            .destination
            .ok_or(ParseError::MissingReceiverDeclaration)?;
        Ok(MessageReceiver {
            destination,
            namespace: self.namespace,
            superclass: self.superclass,
            attributes: self.receiver_attributes,
            enabled_by: self.enabled_by,
            dispatched_from: self.dispatched_from,
            dispatched_to: self.dispatched_to,
            shared_preferences_needs_connection: self.shared_preferences_needs_connection,
            master_condition: self.master_condition,
            messages: self.messages,
        })
    }

    /// A line before the receiver body opens: a header attribute bracket,
    /// the open line itself, or preamble text to skip.
    fn process_preamble_line(&mut self, line: &str) -> Result<(), ParseError> {
        if matches!(self.state, ReceiverState::AwaitingHeader) {
            if let Some(rest) = line.strip_prefix('[') {
                return self.collect_header_text(rest);
            }
        }
        if let Some(captures) = RECEIVER_OPEN.captures(line) {
            return self.open_receiver(&captures);
        }
        Ok(())
    }

    fn collect_header_line(&mut self, line: &str) -> Result<(), ParseError> {
        let pending = match &mut self.state {
            ReceiverState::CollectingHeader { pending } => {
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(line);
                std::mem::take(pending)
            }
            _ => unreachable!("collect_header_line outside CollectingHeader"),
        };
        self.state = ReceiverState::AwaitingHeader;
        self.collect_header_text(&pending)
    }

    /// Accumulate header text until the closing bracket, then parse the
    /// attribute list. Text after the bracket (commonly the open line) is
    /// processed as a line of its own.
    fn collect_header_text(&mut self, text: &str) -> Result<(), ParseError> {
        match text.split_once(']') {
            Some((attributes, remainder)) => {
                self.parse_header_attributes(attributes.trim())?;
                self.state = ReceiverState::AwaitingBodyOpen;
                let remainder = remainder.trim();
                if remainder.is_empty() {
                    Ok(())
                } else {
                    self.process_line(remainder)
                }
            }
            None => {
                self.state = ReceiverState::CollectingHeader {
                    pending: text.to_string(),
                };
                Ok(())
            }
        }
    }

    fn parse_header_attributes(&mut self, attributes: &str) -> Result<(), ParseError> {
        for attribute in attributes.split(',').map(str::trim) {
            if let Some(captures) = HEADER_ATTRIBUTE.captures(attribute) {
                let value = &captures["value"];
                match &captures["name"] {
                    "EnabledBy" => {
                        self.enabled_by = Some(options::parse_feature_gate(value)?);
                        continue;
                    }
                    "DispatchedFrom" => {
                        self.dispatched_from = Some(parse_process_role(value)?);
                        continue;
                    }
                    "DispatchedTo" => {
                        self.dispatched_to = Some(parse_process_role(value)?);
                        continue;
                    }
                    _ => {}
                }
            } else if attribute == "SharedPreferencesNeedsConnection" {
                self.shared_preferences_needs_connection = true;
                continue;
            }
            return Err(ParseError::UnknownAttribute(attribute.to_string()));
        }
        Ok(())
    }

    fn open_receiver(&mut self, captures: &regex::Captures<'_>) -> Result<(), ParseError> {
        if let Some(namespace) = captures.name("namespace") {
            self.namespace = namespace.as_str().to_string();
        }
        let destination = captures["destination"].to_string();
        if let Some(superclass) = captures.name("superclass") {
            if self.enabled_by.is_some() {
                return Err(ParseError::UnsupportedSuperclassWithEnabledBy(destination));
            }
            self.superclass = Some(superclass.as_str().to_string());
        }
        self.receiver_attributes = captures
            .name("attributes")
            .and_then(|m| parse_attribute_list(m.as_str()));
        self.master_condition = self.conditions.take_combined();
        self.destination = Some(destination);
        self.state = ReceiverState::InBody;
        Ok(())
    }

    /// A line inside the receiver body: a message declaration, or something
    /// to skip (the closing brace in particular).
    fn process_body_line(&mut self, line: &str) -> Result<(), ParseError> {
        let Some(captures) = MESSAGE_LINE.captures(line) else {
            return Ok(());
        };
        let condition = self.conditions.combined();

        let name = captures["name"].to_string();
        let parameters = match captures.name("parameters") {
            Some(m) if !m.as_str().trim().is_empty() => {
                apply_condition(parse_parameter_list(m.as_str())?, &condition)
            }
            _ => Vec::new(),
        };

        let MessageOptions {
            validator,
            enabled_by,
            coalescing_key_indices,
        } = match captures.name("options") {
            Some(m) => options::parse_options(m.as_str(), &parameters)?,
            None => MessageOptions::default(),
        };

        let reply_parameters = match captures.name("reply") {
            None => None,
            Some(m) if m.as_str().trim().is_empty() => Some(Vec::new()),
            Some(m) => Some(apply_condition(parse_parameter_list(m.as_str())?, &condition)),
        };

        if coalescing_key_indices.is_some() && reply_parameters.is_some() {
            return Err(ParseError::ReplyParametersConflict(name));
        }

        let attributes = captures
            .name("attributes")
            .and_then(|m| parse_attribute_list(m.as_str()));

        self.messages.push(Message {
            name,
            parameters,
            reply_parameters,
            attributes,
            condition,
            validator,
            enabled_by,
            coalescing_key_indices,
        });
        Ok(())
    }
}

fn apply_condition(parameters: Vec<Parameter>, condition: &Option<String>) -> Vec<Parameter> {
    parameters
        .into_iter()
        .map(|parameter| parameter.with_condition(condition.clone()))
        .collect()
}

fn parse_process_role(value: &str) -> Result<ProcessRole, ParseError> {
    ProcessRole::from_name(value).ok_or_else(|| ParseError::InvalidProcessName(value.to_string()))
}
