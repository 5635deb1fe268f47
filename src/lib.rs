//! # msgdef
//!
//! A parser for the msgdef message receiver definition format.
//!
//! A definition file describes one inter-process message receiver: the
//! messages it accepts, their parameters and reply shapes, preprocessor
//! guards, and feature gating. The parser converts one file into a
//! [`model::MessageReceiver`] value for downstream code generation:
//!
//! ```text
//! [DispatchedFrom=UI, DispatchedTo=WebContent]
//! messages -> WebContentHost {
//! #if ENABLE(TOUCH_EVENTS)
//!     TouchEvent(TouchEventData event) -> (bool handled)
//! #endif
//!     Close()
//! }
//! ```

pub mod model;
pub mod parser;

pub use model::{
    Conjunction, FeatureGate, Message, MessageReceiver, Parameter, ParameterKind, ProcessRole,
};
pub use parser::{parse, ParseError};
