use request_triage::*;

// --- RequestType ---

#[test]
fn test_request_type_labels_round_trip() {
    for request_type in RequestType::ALL {
        assert_eq!(RequestType::from_label(request_type.label()), Some(request_type));
        assert_eq!(request_type.to_string(), request_type.label());
    }
}

#[test]
fn test_primary_label_order() {
    assert_eq!(
        RequestType::primary_labels(),
        [
            "Loan Modification",
            "Payment Inquiry",
            "Fraud Report",
            "General Inquiry"
        ]
    );
}

#[test]
fn test_unknown_label() {
    assert_eq!(RequestType::from_label("Complaint"), None);
    assert_eq!(RequestType::from_label("fraud report"), None);
    assert!(sub_labels_for("Complaint").is_empty());
    assert_eq!(reasoning_for("Complaint"), DEFAULT_REASONING);
}

#[test]
fn test_sub_labels() {
    assert_eq!(
        sub_labels_for("Loan Modification"),
        ["Interest Rate Change", "Term Extension"]
    );
    assert_eq!(
        sub_labels_for("Payment Inquiry"),
        ["Payment Status", "Payment Method Change"]
    );
    assert_eq!(
        sub_labels_for("Fraud Report"),
        ["Unauthorized Transaction", "Identity Theft"]
    );
    assert_eq!(
        sub_labels_for("General Inquiry"),
        ["Product Information", "Account Details"]
    );
}

#[test]
fn test_reasoning_table() {
    assert_eq!(
        reasoning_for("Loan Modification"),
        "Customer requests a change in loan terms."
    );
    assert_eq!(
        reasoning_for("Payment Inquiry"),
        "Customer seeks details on payments."
    );
    assert_eq!(
        reasoning_for("Fraud Report"),
        "Customer reports suspicious activity."
    );
    assert_eq!(reasoning_for("General Inquiry"), "General customer query.");
}

// --- Priority & routing ---

#[test]
fn test_assign_priority() {
    assert_eq!(assign_priority("Fraud Report"), Priority::High);
    assert_eq!(assign_priority("Loan Modification"), Priority::Medium);
    assert_eq!(assign_priority("Payment Inquiry"), Priority::Medium);
    assert_eq!(assign_priority("General Inquiry"), Priority::Low);
}

#[test]
fn test_route_request() {
    assert_eq!(route_request("Loan Modification"), "Modification Team");
    assert_eq!(route_request("Payment Inquiry"), "Payments Team");
    assert_eq!(route_request("Fraud Report"), "Fraud Team");
    assert_eq!(route_request("General Inquiry"), "General Support Team");
}

#[test]
fn test_routing_is_total() {
    for label in ["", "Complaint", "FRAUD REPORT", "Fraud Report ", "N/A"] {
        assert_eq!(assign_priority(label), Priority::Low, "{label:?}");
        assert_eq!(route_request(label), DEFAULT_TEAM, "{label:?}");
    }
}

#[test]
fn test_route_combines_both() {
    let decision = route("Payment Inquiry");
    assert_eq!(decision.priority, Priority::Medium);
    assert_eq!(decision.assigned_team, "Payments Team");
}

#[test]
fn test_priority_display() {
    assert_eq!(Priority::High.to_string(), "High");
    assert_eq!(Priority::Medium.to_string(), "Medium");
    assert_eq!(Priority::Low.as_str(), "Low");
    assert_eq!(serde_json::to_value(Priority::High).unwrap(), "High");
}

// --- TriageReport ---

#[test]
fn test_report_wire_format() {
    let report = TriageReport {
        classification: ClassificationResult {
            primary_request: "Loan Modification".into(),
            sub_request: "Term Extension".into(),
            confidence: 0.75,
            reasoning: "Customer requests a change in loan terms.".into(),
        },
        extracted_fields: ExtractedFields::default(),
        duplicate: DuplicateStatus {
            is_duplicate: false,
            reason: UNIQUE_REASON.into(),
        },
        routing: route("Loan Modification"),
    };

    let json = serde_json::to_value(&report).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "assigned_team",
            "confidence",
            "duplicate_indicator",
            "duplicate_reason",
            "extracted_fields",
            "primary_request",
            "priority",
            "reasoning",
            "sub_request_type",
        ]
    );
    assert_eq!(json["sub_request_type"], "Term Extension");
    assert_eq!(json["duplicate_indicator"], false);
    assert_eq!(json["priority"], "Medium");
    assert_eq!(json["extracted_fields"]["amount"], "N/A");

    let back: TriageReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
