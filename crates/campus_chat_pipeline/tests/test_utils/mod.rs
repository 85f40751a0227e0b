//! Test utilities for pipeline tests.
//!
//! Mock driver and gateway implementations that let tests control every
//! collaborator response without a network or a database.

use async_trait::async_trait;
use campus_chat_core::{GenerateRequest, GenerateResponse};
use campus_chat_error::{
    CampusChatError, CampusChatResult, DatabaseError, DatabaseErrorKind, GeminiError,
    GeminiErrorKind,
};
use campus_chat_interface::{ChatDriver, ScheduleGateway};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock model responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Sleep for the given duration, then succeed with the text
    Slow(Duration, String),
}

/// Mock model backend for testing.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    temperatures: Arc<Mutex<Vec<Option<f32>>>>,
}

impl MockDriver {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            temperatures: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The request temperatures observed by generate(), in call order.
    pub fn temperatures(&self) -> Vec<Option<f32>> {
        self.temperatures.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> CampusChatResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.temperatures.lock().unwrap().push(req.temperature);

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse { text: text.clone() }),
            MockBehavior::Error(kind) => {
                Err(CampusChatError::from(GeminiError::new(kind.clone())))
            }
            MockBehavior::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerateResponse { text: text.clone() })
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock schedule gateway for testing.
#[derive(Clone)]
pub struct MockGateway {
    rows: Result<String, String>,
    describe_count: Arc<Mutex<usize>>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    /// Create a gateway whose execute always returns the given row text.
    pub fn new_with_rows(rows: impl Into<String>) -> Self {
        Self {
            rows: Ok(rows.into()),
            describe_count: Arc::new(Mutex::new(0)),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a gateway whose execute always fails with a query error.
    pub fn new_failing(details: impl Into<String>) -> Self {
        Self {
            rows: Err(details.into()),
            describe_count: Arc::new(Mutex::new(0)),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many times describe_schema was called.
    pub fn describe_count(&self) -> usize {
        *self.describe_count.lock().unwrap()
    }

    /// The queries passed to execute, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl ScheduleGateway for MockGateway {
    fn describe_schema(&self) -> CampusChatResult<String> {
        *self.describe_count.lock().unwrap() += 1;
        Ok("CREATE TABLE rooms_schedule (\n    room_no TEXT,\n    subject_name TEXT,\n    teacher_name TEXT,\n    day TEXT,\n    time_slot TEXT\n);"
            .to_string())
    }

    fn execute(&self, sql: &str) -> CampusChatResult<String> {
        self.executed.lock().unwrap().push(sql.to_string());

        match &self.rows {
            Ok(rows) => Ok(rows.clone()),
            Err(details) => Err(CampusChatError::from(DatabaseError::new(
                DatabaseErrorKind::Query(details.clone()),
            ))),
        }
    }
}
