//! Document variant candidates.

use std::sync::Arc;

use super::entry::ResultEntry;
use super::template::DocumentTemplate;

/// A document-to-produce for one audience, together with its result entries.
///
/// `P` is an opaque passenger payload (addressing data, correlation ids,
/// whatever upstream attaches) that the engine carries through expansion
/// unchanged. Every output clone receives its own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentVariantCandidate<P = ()> {
    /// The template this candidate will be produced from.
    pub template: Arc<DocumentTemplate>,
    /// Result entries attached to this candidate.
    pub results: Vec<ResultEntry>,
    /// Opaque payload preserved verbatim across clones.
    pub passenger: P,
}

impl DocumentVariantCandidate<()> {
    /// Creates a candidate with no passenger payload.
    pub fn new(template: Arc<DocumentTemplate>) -> Self {
        Self {
            template,
            results: Vec::new(),
            passenger: (),
        }
    }

    /// Creates a candidate from an owned template.
    pub fn from_template(template: DocumentTemplate) -> Self {
        Self::new(Arc::new(template))
    }
}

impl<P> DocumentVariantCandidate<P> {
    /// Attaches a passenger payload, replacing any existing one.
    pub fn with_passenger<Q>(self, passenger: Q) -> DocumentVariantCandidate<Q> {
        DocumentVariantCandidate {
            template: self.template,
            results: self.results,
            passenger,
        }
    }

    /// Adds a result entry.
    pub fn with_result(mut self, entry: ResultEntry) -> Self {
        self.results.push(entry);
        self
    }

    /// Returns the template id.
    pub fn template_id(&self) -> &str {
        &self.template.id
    }
}

impl<P: Clone> DocumentVariantCandidate<P> {
    /// Deep-copies this candidate with its result list replaced.
    ///
    /// The template reference and passenger payload are preserved; the
    /// caller owns the new result list outright, so mutating one copy never
    /// affects another.
    pub fn clone_with_results(&self, results: Vec<ResultEntry>) -> Self {
        Self {
            template: Arc::clone(&self.template),
            results,
            passenger: self.passenger.clone(),
        }
    }
}
