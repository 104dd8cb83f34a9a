use std::rc::Rc;

use anyhow::{Result, ensure};
use pagekit_core::MailtoAdapter;
use pagekit_core::memory::{RecordingNavigator, ScriptedForm};

fn submit_once(form: &ScriptedForm) -> Result<Vec<String>> {
    let adapter = Rc::new(MailtoAdapter::new(RecordingNavigator::default()));
    ensure!(adapter.attach(Some(form)), "adapter did not attach");
    let submission = form.submit();
    ensure!(
        submission.default_prevented(),
        "default submission was not suppressed"
    );
    Ok(adapter.navigator().visited())
}

fn expect_single(visited: &[String], expected: &str) -> Result<()> {
    ensure!(
        visited == [expected],
        "navigated to {visited:?}, expected [{expected:?}]"
    );
    Ok(())
}

pub fn encoding() -> Result<()> {
    let form = ScriptedForm::new("mailto:x@y.z", [("message", "a&b=c")]);
    expect_single(&submit_once(&form)?, "mailto:x@y.z?message=a%26b%3Dc")
}

pub fn missing_form() -> Result<()> {
    let adapter = Rc::new(MailtoAdapter::new(RecordingNavigator::default()));
    ensure!(
        !adapter.attach::<ScriptedForm>(None),
        "attached without a form"
    );
    Ok(())
}

pub fn contact_e2e() -> Result<()> {
    let form = ScriptedForm::new(
        "mailto:test@example.com",
        [("name", "Jo Doe"), ("email", "jo@x.com")],
    );
    expect_single(
        &submit_once(&form)?,
        "mailto:test@example.com?name=Jo%20Doe&email=jo%40x.com",
    )
}

pub fn empty_form() -> Result<()> {
    let form = ScriptedForm::new("mailto:x@y.z", Vec::<(String, String)>::new());
    expect_single(&submit_once(&form)?, "mailto:x@y.z")
}

pub fn unreadable_fields() -> Result<()> {
    let form = ScriptedForm::new("mailto:x@y.z", [("message", "hello")]);
    form.fail_reads(true);
    let visited = submit_once(&form)?;
    ensure!(visited.is_empty(), "navigated to {visited:?} without fields");
    Ok(())
}

pub fn raw_names() -> Result<()> {
    let form = ScriptedForm::new("mailto:x@y.z", [("full name", "Jo")]);
    expect_single(&submit_once(&form)?, "mailto:x@y.z?full name=Jo")
}
