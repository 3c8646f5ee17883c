use super::*;

#[test]
fn contact_message_names_the_sender() {
    assert_eq!(contact_message(Some("Enki")), "Transmission locked in, Enki.");
}

#[test]
fn contact_message_without_name() {
    assert_eq!(contact_message(None), "Transmission locked in.");
    assert_eq!(contact_message(Some("")), "Transmission locked in.");
    assert_eq!(contact_message(Some("   ")), "Transmission locked in.");
}

#[test]
fn contact_message_keeps_name_as_typed() {
    assert_eq!(contact_message(Some(" Enki")), "Transmission locked in,  Enki.");
}

#[test]
fn newsletter_message_keeps_email_as_typed() {
    assert_eq!(newsletter_message(Some("a@b.io ")), "Weekly signal dispatched to a@b.io .");
    assert_eq!(newsletter_message(Some("  ")), "Weekly signal dispatched to your inbox.");
}

#[test]
fn newsletter_message_names_the_address() {
    let msg = newsletter_message(Some("test@example.com"));
    assert!(msg.contains("test@example.com"));
    assert_eq!(msg, "Weekly signal dispatched to test@example.com.");
}

#[test]
fn newsletter_message_falls_back_to_inbox() {
    assert_eq!(newsletter_message(Some("")), "Weekly signal dispatched to your inbox.");
    assert_eq!(newsletter_message(None), "Weekly signal dispatched to your inbox.");
}
