//! Upload intake controller.
//!
//! Drag-and-drop release and the file picker both funnel into
//! [`UploadIntake::accept`], so validation has exactly one code path.
//! Acceptance is a typed outcome rather than a silent no-op: callers can
//! tell "nothing happened" apart from "rejected, and why".
//!
//! The preview handle discipline matters on the web, where each accepted
//! file gets a revocable object URL: a session releases its handle when it
//! is reset or replaced, so live references never accumulate.

use thiserror::Error;

/// Why a candidate file was turned away.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectReason {
    /// No file was present in the drop or picker event
    #[error("No file was provided")]
    Missing,
    /// The declared (or inferred) content type is not an image
    #[error("Unsupported file type: {0}. Please choose a JPG, PNG, or WEBP image")]
    UnsupportedType(String),
}

/// Result of offering a candidate file to the intake controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    Accepted,
    Rejected(RejectReason),
}

/// Metadata of a file offered for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    /// Content type as declared by the platform, if any.
    pub content_type: Option<String>,
    /// Size in bytes.
    pub len: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, content_type: Option<String>, len: u64) -> Self {
        Self {
            name: name.into(),
            content_type,
            len,
        }
    }

    /// Declared content type, falling back to an extension-based guess when
    /// the platform did not supply one.
    pub fn effective_type(&self) -> Option<String> {
        self.content_type
            .clone()
            .or_else(|| guess_content_type(&self.name))
    }

    /// Size in megabytes, for display.
    pub fn size_mb(&self) -> f64 {
        self.len as f64 / 1024.0 / 1024.0
    }
}

/// Infers an image MIME type from a file extension.
pub fn guess_content_type(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let mime = match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}

/// A locally-scoped, revocable reference that lets a selected file be
/// rendered before any upload completes.
pub trait PreviewHandle {
    /// Releases the underlying resource. Must be idempotent.
    fn release(&mut self);
}

/// One accepted file: its metadata, its bytes, and its preview handle.
#[derive(Debug)]
pub struct UploadSession<P: PreviewHandle> {
    candidate: FileCandidate,
    bytes: Vec<u8>,
    preview: P,
}

impl<P: PreviewHandle> UploadSession<P> {
    pub fn candidate(&self) -> &FileCandidate {
        &self.candidate
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }
}

/// Holds at most one [`UploadSession`] and enforces the validation and
/// preview-release rules around replacing it.
#[derive(Debug, Default)]
pub struct UploadIntake<P: PreviewHandle> {
    session: Option<UploadSession<P>>,
}

impl<P: PreviewHandle> UploadIntake<P> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Offers a candidate file. Non-image candidates are rejected and leave
    /// any existing session untouched; accepted candidates replace the
    /// session, releasing the superseded preview handle first.
    pub fn accept(
        &mut self,
        candidate: Option<FileCandidate>,
        bytes: Vec<u8>,
        make_preview: impl FnOnce(&FileCandidate, &[u8]) -> P,
    ) -> IntakeOutcome {
        let Some(candidate) = candidate else {
            return IntakeOutcome::Rejected(RejectReason::Missing);
        };
        match candidate.effective_type() {
            Some(mime) if mime.starts_with("image/") => {}
            other => {
                let label = other.unwrap_or_else(|| "unknown".to_string());
                return IntakeOutcome::Rejected(RejectReason::UnsupportedType(label));
            }
        }

        self.reset();
        let preview = make_preview(&candidate, &bytes);
        self.session = Some(UploadSession {
            candidate,
            bytes,
            preview,
        });
        IntakeOutcome::Accepted
    }

    /// Ends the current session, releasing its preview handle.
    pub fn reset(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.preview.release();
        }
    }

    pub fn session(&self) -> Option<&UploadSession<P>> {
        self.session.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.session.is_some()
    }
}

/// Reentrant drag-state counter.
///
/// Browsers fire drag-enter/drag-leave for every nested child element, so a
/// plain boolean flickers. The counter goes up on enter and down on leave;
/// the drop surface is visually active exactly while the depth is positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    depth: u32,
}

impl DragTracker {
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Resets the counter when a drop completes (or the drag is abandoned).
    pub fn settle(&mut self) {
        self.depth = 0;
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Preview handle that records how many times it was released.
    #[derive(Debug, Clone)]
    struct CountingPreview {
        releases: Rc<Cell<u32>>,
    }

    impl CountingPreview {
        fn tracked() -> (Self, Rc<Cell<u32>>) {
            let releases = Rc::new(Cell::new(0));
            (
                Self {
                    releases: releases.clone(),
                },
                releases,
            )
        }
    }

    impl PreviewHandle for CountingPreview {
        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn image_candidate(name: &str) -> Option<FileCandidate> {
        Some(FileCandidate::new(
            name,
            guess_content_type(name),
            4,
        ))
    }

    #[test]
    fn test_non_image_candidates_leave_session_unchanged() {
        let (preview, releases) = CountingPreview::tracked();
        let mut intake = UploadIntake::new();
        assert_eq!(
            intake.accept(image_candidate("box.png"), vec![1, 2, 3, 4], |_, _| preview
                .clone()),
            IntakeOutcome::Accepted
        );

        let outcome = intake.accept(
            Some(FileCandidate::new(
                "report.pdf",
                Some("application/pdf".to_string()),
                4,
            )),
            vec![0; 4],
            |_, _| CountingPreview::tracked().0,
        );
        assert_eq!(
            outcome,
            IntakeOutcome::Rejected(RejectReason::UnsupportedType(
                "application/pdf".to_string()
            ))
        );

        // The original session survives and its preview was not released
        assert_eq!(intake.session().unwrap().candidate().name, "box.png");
        assert_eq!(releases.get(), 0);
    }

    #[test]
    fn test_missing_candidate_is_rejected() {
        let mut intake: UploadIntake<CountingPreview> = UploadIntake::new();
        let outcome = intake.accept(None, Vec::new(), |_, _| CountingPreview::tracked().0);
        assert_eq!(outcome, IntakeOutcome::Rejected(RejectReason::Missing));
        assert!(!intake.has_file());
    }

    #[test]
    fn test_accept_then_reset_releases_exactly_one_preview() {
        let (preview, releases) = CountingPreview::tracked();
        let mut intake = UploadIntake::new();
        intake.accept(image_candidate("blister.jpg"), vec![0xff; 4], |_, _| {
            preview.clone()
        });
        assert!(intake.has_file());

        intake.reset();
        assert!(!intake.has_file());
        assert_eq!(releases.get(), 1);

        // Reset on an empty intake is a no-op
        intake.reset();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_replacement_releases_superseded_preview() {
        let (first, first_releases) = CountingPreview::tracked();
        let (second, second_releases) = CountingPreview::tracked();
        let mut intake = UploadIntake::new();

        intake.accept(image_candidate("front.png"), vec![1; 4], |_, _| first.clone());
        intake.accept(image_candidate("back.png"), vec![2; 4], |_, _| second.clone());

        assert_eq!(first_releases.get(), 1);
        assert_eq!(second_releases.get(), 0);
        assert_eq!(intake.session().unwrap().candidate().name, "back.png");
    }

    #[test]
    fn test_declared_type_accepts_extensionless_image() {
        // Browsers declare a type even when the filename has no extension
        let mut intake = UploadIntake::new();
        let outcome = intake.accept(
            Some(FileCandidate::new(
                "camera-capture",
                Some("image/jpeg".to_string()),
                4,
            )),
            vec![0xff; 4],
            |_, _| CountingPreview::tracked().0,
        );
        assert_eq!(outcome, IntakeOutcome::Accepted);
    }

    #[test]
    fn test_declared_type_wins_over_image_extension() {
        let mut intake = UploadIntake::new();
        let outcome = intake.accept(
            Some(FileCandidate::new(
                "fake.png",
                Some("application/pdf".to_string()),
                4,
            )),
            vec![0; 4],
            |_, _| CountingPreview::tracked().0,
        );
        assert_eq!(
            outcome,
            IntakeOutcome::Rejected(RejectReason::UnsupportedType(
                "application/pdf".to_string()
            ))
        );
    }

    #[test]
    fn test_guess_content_type_known_and_unknown() {
        assert_eq!(
            guess_content_type("photo.JPG").as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(
            guess_content_type("scan.webp").as_deref(),
            Some("image/webp")
        );
        assert_eq!(guess_content_type("notes.txt"), None);
        assert_eq!(guess_content_type("no_extension"), None);
        assert_eq!(guess_content_type(".gitignore"), None);
    }

    #[test]
    fn test_drag_counter_survives_nested_children() {
        let mut drag = DragTracker::default();
        drag.enter(); // outer surface
        drag.enter(); // nested child
        assert!(drag.is_active());

        drag.leave(); // leaving the child must not deactivate
        assert!(drag.is_active());

        drag.leave();
        assert!(!drag.is_active());

        // Underflow is clamped
        drag.leave();
        assert!(!drag.is_active());

        drag.enter();
        drag.settle();
        assert!(!drag.is_active());
    }
}
