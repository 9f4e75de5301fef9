//! Session orchestration tests over a scripted driver.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kaizen::{AnalysisSession, KaizenDriver, Language, MediaAsset, PreviewHandle, RunStatus};
use kaizen_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use kaizen_error::{GeminiError, GeminiErrorKind, KaizenResult};

#[derive(Clone, Copy)]
enum Script {
    Markdown,
    Empty,
    ConnectFailure,
    HttpFailure,
}

struct ScriptedDriver {
    script: Script,
    seen: Mutex<Option<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            seen: Mutex::new(None),
        })
    }

    fn last_request(&self) -> GenerateRequest {
        self.seen
            .lock()
            .unwrap()
            .clone()
            .expect("driver was never called")
    }
}

#[async_trait]
impl KaizenDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> KaizenResult<GenerateResponse> {
        *self.seen.lock().unwrap() = Some(req.clone());
        match self.script {
            Script::Markdown => Ok(GenerateResponse {
                outputs: vec![Output::Text("# 分析結果\n...".to_string())],
            }),
            Script::Empty => Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into()),
            Script::ConnectFailure => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "connection reset".to_string(),
            ))
            .into()),
            Script::HttpFailure => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 503,
                message: "model overloaded".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

fn inline_asset(name: &str, path: &Path, size_bytes: u64) -> MediaAsset {
    MediaAsset {
        name: name.to_string(),
        mime: "video/mp4".to_string(),
        size_bytes,
        duration_secs: 12.0,
        path: path.to_path_buf(),
        preview: PreviewHandle::new(1),
    }
}

fn write_clip(dir: &tempfile::TempDir, name: &str) -> (std::path::PathBuf, u64) {
    let path = dir.path().join(name);
    let bytes = vec![0x42u8; 2048];
    std::fs::write(&path, &bytes).unwrap();
    (path, bytes.len() as u64)
}

#[tokio::test]
async fn a_run_needs_assets_and_context() {
    let driver = ScriptedDriver::new(Script::Markdown);
    let mut session = AnalysisSession::new(driver);

    session.set_context("assembly line A");
    let err = session.run().await.expect_err("no assets selected");
    assert!(format!("{err}").contains("no accepted assets"));
    assert_eq!(session.status(), RunStatus::Idle);

    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "clip.mp4");
    session.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);
    session.set_context("   ");
    let err = session.run().await.expect_err("blank context");
    assert!(format!("{err}").contains("context is empty"));
}

#[tokio::test]
async fn a_completed_run_stores_the_report_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "station.mp4");

    let driver = ScriptedDriver::new(Script::Markdown);
    let mut session = AnalysisSession::new(driver.clone());
    session.set_language(Language::Ja);
    session.set_context("Worker assembling engine part A");
    session.adopt_assets(vec![inline_asset("station.mp4", &path, size)]);

    let report = session.run().await.unwrap();
    assert_eq!(report.markdown, "# 分析結果\n...");
    assert_eq!(session.status(), RunStatus::Completed);

    // One system turn carrying the template, one user turn ending with the
    // instruction-plus-manifest text.
    let request = driver.last_request();
    assert_eq!(request.temperature, Some(0.4));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    match &request.messages[0].content[0] {
        Input::Text(t) => assert!(t.contains("トヨタ生産方式")),
        other => panic!("expected template text, got {other:?}"),
    }
    assert_eq!(request.messages[1].role, Role::User);
    match request.messages[1].content.last() {
        Some(Input::Text(t)) => {
            assert!(t.starts_with("Worker assembling engine part A"));
            assert!(t.contains("station.mp4"));
        }
        other => panic!("expected trailing manifest, got {other:?}"),
    }
}

#[tokio::test]
async fn an_empty_response_completes_with_a_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "clip.mp4");

    let mut session = AnalysisSession::new(ScriptedDriver::new(Script::Empty));
    session.set_language(Language::En);
    session.set_context("inspect packaging line");
    session.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);

    let report = session.run().await.unwrap();
    assert!(report.markdown.contains("No analysis content was returned"));
    assert_eq!(session.status(), RunStatus::Completed);
}

#[tokio::test]
async fn a_submission_failure_fails_the_run_and_keeps_the_old_report() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "clip.mp4");

    let mut session = AnalysisSession::new(ScriptedDriver::new(Script::Markdown));
    session.set_context("first pass");
    session.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);
    session.run().await.unwrap();
    let first = session.report().unwrap().clone();

    let mut session = {
        let mut failing = AnalysisSession::new(ScriptedDriver::new(Script::ConnectFailure));
        failing.set_context("second pass");
        failing.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);
        failing
    };
    let err = session.run().await.expect_err("network failure");
    assert!(format!("{err}").contains("submission-failed"));
    assert_eq!(session.status(), RunStatus::Failed);
    assert!(session.report().is_none());

    // The successful session still holds its report.
    assert_eq!(first.markdown, "# 分析結果\n...");
}

#[tokio::test]
async fn a_rejected_http_status_surfaces_as_a_submission_failure() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "clip.mp4");

    let mut session = AnalysisSession::new(ScriptedDriver::new(Script::HttpFailure));
    session.set_context("cycle study");
    session.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);

    let err = session.run().await.expect_err("503 from the API");
    let rendered = format!("{err}");
    assert!(rendered.contains("submission-failed"), "{rendered}");
    assert!(rendered.contains("503"), "{rendered}");
    assert_eq!(session.status(), RunStatus::Failed);
    assert!(session.report().is_none());
}

#[tokio::test]
async fn removing_or_replacing_assets_releases_previews_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "a.mp4");

    let mut session = AnalysisSession::new(ScriptedDriver::new(Script::Markdown));
    let kept = inline_asset("a.mp4", &path, size);
    let handle = kept.preview.clone();
    session.adopt_assets(vec![kept]);

    assert!(session.remove_asset("a.mp4"));
    assert!(handle.is_released());
    assert!(!session.remove_asset("a.mp4"), "already gone");
    assert!(!handle.release(), "the removal performed the release");

    let replaced = inline_asset("b.mp4", &path, size);
    let replaced_handle = replaced.preview.clone();
    session.adopt_assets(vec![replaced]);
    session.replace_assets(Vec::new());
    assert!(replaced_handle.is_released());
    assert!(session.assets().is_empty());
}

#[tokio::test]
async fn a_new_run_replaces_the_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let (path, size) = write_clip(&dir, "clip.mp4");

    let mut session = AnalysisSession::new(ScriptedDriver::new(Script::Markdown));
    session.set_context("cycle one");
    session.adopt_assets(vec![inline_asset("clip.mp4", &path, size)]);

    let first_created = session.run().await.unwrap().created_at;
    let second_created = session.run().await.unwrap().created_at;
    assert!(second_created >= first_created);
    assert_eq!(session.status(), RunStatus::Completed);
}
