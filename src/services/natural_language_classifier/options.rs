//! Options for Natural Language Classifier operations.

use super::types::ClassifyInput;
use crate::errors::{RequiredFields, WatsonResult};
use crate::transport::FileData;
use std::collections::BTreeMap;

/// Options for `classify`
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Classifier ID to use
    pub classifier_id: Option<String>,
    /// The submitted phrase
    pub text: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ClassifyOptions {
    /// Create options with the required fields set
    pub fn new(classifier_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            classifier_id: Some(classifier_id.into()),
            text: Some(text.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ClassifyOptions")
            .string("classifier_id", &self.classifier_id)
            .value("text", &self.text)
            .finish()
    }
}

/// Options for `classify_collection`
#[derive(Debug, Clone, Default)]
pub struct ClassifyCollectionOptions {
    /// Classifier ID to use
    pub classifier_id: Option<String>,
    /// The submitted phrases
    pub collection: Option<Vec<ClassifyInput>>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ClassifyCollectionOptions {
    /// Create options with the required fields set
    pub fn new(classifier_id: impl Into<String>, collection: Vec<ClassifyInput>) -> Self {
        Self {
            classifier_id: Some(classifier_id.into()),
            collection: Some(collection),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ClassifyCollectionOptions")
            .string("classifier_id", &self.classifier_id)
            .value("collection", &self.collection)
            .finish()
    }
}

/// Options for `create_classifier`
#[derive(Debug, Default)]
pub struct CreateClassifierOptions {
    /// Metadata in JSON format: the language of the training data and an optional name
    pub training_metadata: Option<FileData>,
    /// Training data in CSV format
    pub training_data: Option<FileData>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl CreateClassifierOptions {
    /// Create options with the required fields set
    pub fn new(training_metadata: FileData, training_data: FileData) -> Self {
        Self {
            training_metadata: Some(training_metadata),
            training_data: Some(training_data),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("CreateClassifierOptions")
            .value("training_metadata", &self.training_metadata)
            .value("training_data", &self.training_data)
            .finish()
    }
}

/// Options for `list_classifiers`
#[derive(Debug, Clone, Default)]
pub struct ListClassifiersOptions {
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ListClassifiersOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `get_classifier`
#[derive(Debug, Clone, Default)]
pub struct GetClassifierOptions {
    /// Classifier ID to use
    pub classifier_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl GetClassifierOptions {
    /// Create options with the required fields set
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: Some(classifier_id.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("GetClassifierOptions")
            .string("classifier_id", &self.classifier_id)
            .finish()
    }
}

/// Options for `delete_classifier`
#[derive(Debug, Clone, Default)]
pub struct DeleteClassifierOptions {
    /// Classifier ID to use
    pub classifier_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl DeleteClassifierOptions {
    /// Create options with the required fields set
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: Some(classifier_id.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("DeleteClassifierOptions")
            .string("classifier_id", &self.classifier_id)
            .finish()
    }
}
