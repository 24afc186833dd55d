use elimu_model::{
    AdmissionStatus, Contact, CourseDraft, EmailAddress, NewContact, NewStudent, ParseError,
    Student, SUBJECT_LABELS,
};

#[test]
fn student_submission_is_trimmed_before_storage() {
    let submission =
        NewStudent::parse("  Jane Wanjiku ", "jane@example.com", " 0712 345 678 ", " ECDE ")
            .expect("valid submission");
    assert_eq!(submission.name, "Jane Wanjiku");
    assert_eq!(submission.phone, "0712 345 678");
    assert_eq!(submission.course, "ECDE");
}

#[test]
fn student_record_keeps_submission_fields_verbatim() {
    let submission = NewStudent::parse(
        "Peter Wilson",
        "peter@example.com",
        "0711456789",
        "HIV (VCT) Counselling and Testing",
    )
    .expect("valid submission");
    let student = Student::from_submission(1, submission.clone(), 99);
    assert_eq!(student.name, submission.name);
    assert_eq!(student.email, submission.email);
    assert_eq!(student.course, submission.course);
    assert_eq!(student.admission, AdmissionStatus::Pending);
}

#[test]
fn contact_validation_reports_the_offending_field() {
    let err = NewContact::parse("Jane", "broken", "0712", "Other", "Hello")
        .expect_err("bad email");
    assert_eq!(err.field(), "email");
    assert!(matches!(err, ParseError::InvalidFormat("email", _)));
}

#[test]
fn subject_label_set_is_the_canonical_six() {
    assert_eq!(SUBJECT_LABELS.len(), 6);
    assert!(SUBJECT_LABELS.contains(&"General Inquiry"));
    assert!(SUBJECT_LABELS.contains(&"Other"));
}

#[test]
fn serde_wire_shape_is_stable_for_records() {
    let contact = Contact::from_submission(
        2,
        NewContact::parse("Jane", "jane@example.com", "0712", "Payment Issue", "Hi")
            .expect("valid"),
        1_700_000_000_000,
    );
    let json = serde_json::to_value(&contact).expect("serialize");
    assert_eq!(json["id"], 2);
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["replied"], false);

    let back: Contact = serde_json::from_value(json).expect("round trip");
    assert_eq!(back, contact);
}

#[test]
fn course_draft_round_trips_into_record() {
    let draft = CourseDraft::parse(
        "Adherence Counselling",
        "Certificate Course",
        "Specialized adherence counselling training.",
        "2 months",
        "Certificate",
        Some("Healthcare background preferred"),
        "KSH 12,000",
    )
    .expect("valid draft");
    let course = elimu_model::Course::from_draft(5, draft);
    assert_eq!(course.id, 5);
    assert_eq!(course.prerequisites.as_deref(), Some("Healthcare background preferred"));
}

#[test]
fn email_display_matches_parsed_input() {
    let email = EmailAddress::parse("leadership@elimu.ac.ke").expect("valid");
    assert_eq!(email.to_string(), email.as_str());
}
