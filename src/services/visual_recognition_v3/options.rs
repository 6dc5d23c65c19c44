//! Options for Visual Recognition v3 operations.

use crate::errors::{RequiredFields, WatsonResult};
use crate::transport::FileData;
use std::collections::BTreeMap;

/// Options for `classify`
///
/// Provide an image with `images_file`, a URL with `url`, or both.
#[derive(Debug, Default)]
pub struct ClassifyOptions {
    /// An image file (.gif, .jpg, .png, .tif) or .zip file with images
    pub images_file: Option<FileData>,
    /// URL of an image to classify
    pub url: Option<String>,
    /// Minimum score a class must have to be displayed in the response
    pub threshold: Option<f32>,
    /// Categories of classifiers to apply, e.g. `IBM` or `me`
    pub owners: Option<Vec<String>>,
    /// Classifier IDs to classify the images against
    pub classifier_ids: Option<Vec<String>>,
    /// Language of the output class names
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ClassifyOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image file
    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file = Some(images_file);
        self
    }

    /// Set the image URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the minimum class score
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the classifier owners
    pub fn with_owners(mut self, owners: Vec<String>) -> Self {
        self.owners = Some(owners);
        self
    }

    /// Set the classifier IDs
    pub fn with_classifier_ids(mut self, classifier_ids: Vec<String>) -> Self {
        self.classifier_ids = Some(classifier_ids);
        self
    }

    /// Set the output language
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `detect_faces`
#[derive(Debug, Default)]
pub struct DetectFacesOptions {
    /// An image file (.gif, .jpg, .png, .tif) or .zip file with images
    pub images_file: Option<FileData>,
    /// URL of an image to analyze
    pub url: Option<String>,
    /// Language of the gender labels
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl DetectFacesOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image file
    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file = Some(images_file);
        self
    }

    /// Set the image URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the output language
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `create_classifier`
#[derive(Debug, Default)]
pub struct CreateClassifierOptions {
    /// The name of the new classifier
    pub name: Option<String>,
    /// Compressed files of positive examples, keyed by class name
    pub positive_examples: BTreeMap<String, FileData>,
    /// A .zip file of images that do not depict the subject of any of the classes
    pub negative_examples: Option<FileData>,
    /// Filename for `negative_examples`
    pub negative_examples_filename: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl CreateClassifierOptions {
    /// Create options with the required name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Add a .zip file of positive examples for `class_name`
    pub fn with_positive_examples(mut self, class_name: impl Into<String>, examples: FileData) -> Self {
        self.positive_examples.insert(class_name.into(), examples);
        self
    }

    /// Set the negative examples
    pub fn with_negative_examples(mut self, examples: FileData) -> Self {
        self.negative_examples = Some(examples);
        self
    }

    /// Set the filename for the negative examples
    pub fn with_negative_examples_filename(mut self, filename: impl Into<String>) -> Self {
        self.negative_examples_filename = Some(filename.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("CreateClassifierOptions")
            .string("name", &self.name)
            .check(
                !self.positive_examples.is_empty(),
                "positive_examples",
                "at least one class of positive examples is required",
            )
            .finish()
    }
}

/// Options for `list_classifiers`
#[derive(Debug, Clone, Default)]
pub struct ListClassifiersOptions {
    /// Specify `true` to return details about the classifiers
    pub verbose: Option<bool>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ListClassifiersOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Request classifier details
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
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
    /// The ID of the classifier
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

/// Options for `update_classifier`
///
/// Retraining replaces nothing: new classes are added and new examples for
/// existing classes are appended.
#[derive(Debug, Default)]
pub struct UpdateClassifierOptions {
    /// The ID of the classifier
    pub classifier_id: Option<String>,
    /// Compressed files of positive examples, keyed by class name
    pub positive_examples: BTreeMap<String, FileData>,
    /// A .zip file of images that do not depict the subject of any of the classes
    pub negative_examples: Option<FileData>,
    /// Filename for `negative_examples`
    pub negative_examples_filename: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl UpdateClassifierOptions {
    /// Create options with the required fields set
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: Some(classifier_id.into()),
            ..Default::default()
        }
    }

    /// Add a .zip file of positive examples for `class_name`
    pub fn with_positive_examples(mut self, class_name: impl Into<String>, examples: FileData) -> Self {
        self.positive_examples.insert(class_name.into(), examples);
        self
    }

    /// Set the negative examples
    pub fn with_negative_examples(mut self, examples: FileData) -> Self {
        self.negative_examples = Some(examples);
        self
    }

    /// Set the filename for the negative examples
    pub fn with_negative_examples_filename(mut self, filename: impl Into<String>) -> Self {
        self.negative_examples_filename = Some(filename.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("UpdateClassifierOptions")
            .string("classifier_id", &self.classifier_id)
            .finish()
    }
}

/// Options for `delete_classifier`
#[derive(Debug, Clone, Default)]
pub struct DeleteClassifierOptions {
    /// The ID of the classifier
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

/// Options for `get_core_ml_model`
#[derive(Debug, Clone, Default)]
pub struct GetCoreMlModelOptions {
    /// The ID of the classifier
    pub classifier_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl GetCoreMlModelOptions {
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
        RequiredFields::new("GetCoreMlModelOptions")
            .string("classifier_id", &self.classifier_id)
            .finish()
    }
}

/// Options for `delete_user_data`
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    /// The customer ID for which all data is to be deleted
    pub customer_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl DeleteUserDataOptions {
    /// Create options with the required fields set
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
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
        RequiredFields::new("DeleteUserDataOptions")
            .string("customer_id", &self.customer_id)
            .finish()
    }
}
