//! Service operations the dispatcher can invoke

use crate::{
    domain::Argument,
    shared::error::{AppError, AppResult},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Owned, type-erased input argument
pub type BoxedArgument = Box<Argument>;

/// One invocable operation of a service
pub trait ServiceOperation: Send + Sync {
    fn name(&self) -> &str;

    /// Turn wire parameters into ordered arguments; `None` entries are nulls
    fn decode_inputs(&self, params: Option<&Value>) -> AppResult<Vec<Option<BoxedArgument>>>;

    /// Run the operation body
    fn invoke(&self, inputs: &[Option<BoxedArgument>]) -> AppResult<Value>;
}

/// Operation taking a single typed parameter
///
/// Accepts `[value]`, a bare object, or no parameters at all (a null input).
pub struct TypedOperation<T, F> {
    name: String,
    handler: F,
    _input: PhantomData<fn() -> T>,
}

impl<T, F> TypedOperation<T, F>
where
    T: DeserializeOwned + Send + Sync + 'static,
    F: Fn(&T) -> AppResult<Value> + Send + Sync,
{
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
            _input: PhantomData,
        }
    }

    fn decode_one(&self, value: &Value) -> AppResult<Option<BoxedArgument>> {
        if value.is_null() {
            return Ok(None);
        }
        let decoded: T = serde_json::from_value(value.clone()).map_err(|e| AppError::InvalidParameters {
            method: self.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(Box::new(decoded) as BoxedArgument))
    }
}

impl<T, F> ServiceOperation for TypedOperation<T, F>
where
    T: DeserializeOwned + Send + Sync + 'static,
    F: Fn(&T) -> AppResult<Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn decode_inputs(&self, params: Option<&Value>) -> AppResult<Vec<Option<BoxedArgument>>> {
        let input = match params {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => match items.as_slice() {
                [] => None,
                [single] => self.decode_one(single)?,
                _ => {
                    return Err(AppError::InvalidParameters {
                        method: self.name.clone(),
                        reason: format!("Too many parameters: expected 1, got {}", items.len()),
                    })
                }
            },
            Some(other) => self.decode_one(other)?,
        };
        Ok(vec![input])
    }

    fn invoke(&self, inputs: &[Option<BoxedArgument>]) -> AppResult<Value> {
        let input = inputs
            .first()
            .and_then(|i| i.as_deref())
            .and_then(|i| i.downcast_ref::<T>())
            .ok_or_else(|| AppError::InvalidParameters {
                method: self.name.clone(),
                reason: "Missing required parameter".to_string(),
            })?;
        (self.handler)(input)
    }
}

/// Operation taking positional JSON parameters, each one an input argument
pub struct JsonArgsOperation<F> {
    name: String,
    arity: usize,
    handler: F,
}

impl<F> JsonArgsOperation<F>
where
    F: Fn(&[Value]) -> AppResult<Value> + Send + Sync,
{
    /// `arity` is the maximum number of positional parameters accepted
    pub fn new(name: impl Into<String>, arity: usize, handler: F) -> Self {
        Self {
            name: name.into(),
            arity,
            handler,
        }
    }
}

impl<F> ServiceOperation for JsonArgsOperation<F>
where
    F: Fn(&[Value]) -> AppResult<Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn decode_inputs(&self, params: Option<&Value>) -> AppResult<Vec<Option<BoxedArgument>>> {
        let items = match params {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
        };

        if items.len() > self.arity {
            return Err(AppError::InvalidParameters {
                method: self.name.clone(),
                reason: format!("Too many parameters: expected {}, got {}", self.arity, items.len()),
            });
        }

        let mut inputs: Vec<Option<BoxedArgument>> = items
            .into_iter()
            .map(|v| if v.is_null() { None } else { Some(Box::new(v) as BoxedArgument) })
            .collect();
        inputs.resize_with(self.arity, || None);
        Ok(inputs)
    }

    fn invoke(&self, inputs: &[Option<BoxedArgument>]) -> AppResult<Value> {
        let values: Vec<Value> = inputs
            .iter()
            .map(|i| {
                i.as_deref()
                    .and_then(|v| v.downcast_ref::<Value>())
                    .cloned()
                    .unwrap_or(Value::Null)
            })
            .collect();
        (self.handler)(&values)
    }
}
