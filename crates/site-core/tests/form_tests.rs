// Validation and response-acceptance rules for the contact form.

use site_core::{email_is_valid, phone_is_valid, submission_accepted, Inquiry, InquiryError};

fn filled() -> Inquiry {
    Inquiry {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        phone: "0123456789".into(),
        ..Default::default()
    }
}

#[test]
fn accepts_a_complete_inquiry() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn name_is_required_and_reported_first() {
    let mut inquiry = filled();
    inquiry.name.clear();
    inquiry.email.clear(); // with several problems, the name message wins
    assert_eq!(inquiry.validate(), Err(InquiryError::MissingName));
}

#[test]
fn email_rules_match_the_page_pattern() {
    for good in ["a@b.c", "ada@example.com", "a@b.c.d", "a.b@c.d", "a@b-x.co"] {
        assert!(email_is_valid(good), "{good} should pass");
    }
    for bad in [
        "",
        "a",
        "a@b",
        "@b.c",
        "a@.c",
        "a@b.",
        "a b@c.d",
        "a@b c.d",
        "a@@b.c",
        "a@b@c.d",
        "a@b.c ",
    ] {
        assert!(!email_is_valid(bad), "{bad:?} should fail");
    }
}

#[test]
fn phone_must_be_exactly_ten_digits() {
    assert!(phone_is_valid("0123456789"));
    for bad in [
        "",
        "123456789",
        "12345678901",
        "12345 6789",
        "123456789a",
        "+1234567890",
    ] {
        assert!(!phone_is_valid(bad), "{bad:?} should fail");
    }
}

#[test]
fn invalid_email_and_phone_report_the_page_copy() {
    let mut inquiry = filled();
    inquiry.email = "nope".into();
    assert_eq!(
        inquiry.validate().unwrap_err().to_string(),
        "Please enter a valid email address (must include @ and domain)."
    );

    let mut inquiry = filled();
    inquiry.phone = "12345".into();
    assert_eq!(
        inquiry.validate().unwrap_err().to_string(),
        "Please enter a valid 10-digit phone number."
    );
}

#[test]
fn trimming_happens_before_validation_sees_values() {
    let inquiry = Inquiry {
        name: "  Ada  ".into(),
        email: " ada@example.com ".into(),
        phone: " 0123456789 ".into(),
        ..Default::default()
    }
    .trimmed();
    assert_eq!(inquiry.name, "Ada");
    assert_eq!(inquiry.validate(), Ok(()));
}

#[test]
fn payload_uses_the_endpoint_wire_names() {
    let json = serde_json::to_string(&filled()).unwrap();
    assert!(json.contains("\"anythingElse\""));
    for key in [
        "name", "email", "company", "service", "budget", "website", "phone",
    ] {
        assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
    }
}

#[test]
fn acceptance_needs_an_ok_status_and_no_explicit_rejection() {
    assert!(submission_accepted(true, r#"{"ok":true}"#));
    assert!(submission_accepted(true, r#"{"ok":true,"row":17}"#));
    // The endpoint sometimes answers plain text; that still counts.
    assert!(submission_accepted(true, ""));
    assert!(submission_accepted(true, "OK"));
    assert!(submission_accepted(true, r#"{"status":"queued"}"#));
    // Explicit rejection or a transport-level failure does not.
    assert!(!submission_accepted(true, r#"{"ok":false}"#));
    assert!(!submission_accepted(false, r#"{"ok":true}"#));
    assert!(!submission_accepted(false, ""));
}
