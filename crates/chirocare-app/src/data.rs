//! Sample data backing the directory and messaging screens.
//!
//! Real fetching and chat transport live outside this crate; these records
//! stand in for them so the screens have something to show.

use chirocare_nav::{BookingId, ChiroId};
use serde::{Deserialize, Serialize};

/// A chiropractor listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chiropractor {
    /// Directory id
    pub id: ChiroId,
    /// Display name
    pub name: String,
    /// Main specialty
    pub specialty: String,
    /// Clinic name
    pub clinic: String,
    /// Average patient rating out of 5
    pub rating: f32,
    /// Whether new bookings are accepted
    pub accepting_patients: bool,
}

/// An appointment slot held for a chiropractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking id
    pub id: BookingId,
    /// Chiropractor the booking is with
    pub chiro_id: ChiroId,
    /// Human-readable slot
    pub slot: String,
}

/// One row of the conversation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPreview {
    /// Conversation id
    pub id: String,
    /// Other participant
    pub with: String,
    /// Last message text
    pub last_message: String,
    /// Unread message count
    pub unread: u32,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender display name
    pub sender: String,
    /// Message text
    pub body: String,
    /// Whether the patient sent it
    pub from_patient: bool,
    /// Display timestamp
    pub sent_at: String,
}

fn chiro(
    id: u32,
    name: &str,
    specialty: &str,
    clinic: &str,
    rating: f32,
    accepting: bool,
) -> Chiropractor {
    Chiropractor {
        id: ChiroId(id),
        name: name.to_string(),
        specialty: specialty.to_string(),
        clinic: clinic.to_string(),
        rating,
        accepting_patients: accepting,
    }
}

/// Directory listing
pub fn chiropractors() -> Vec<Chiropractor> {
    vec![
        chiro(1, "Dr. Amara Okafor", "Sports injuries", "Northside Spine Clinic", 4.8, true),
        chiro(2, "Dr. Lucas Brandt", "Prenatal care", "Harbor Chiropractic", 4.6, true),
        chiro(3, "Dr. Mei Tanaka", "Lower back pain", "Northside Spine Clinic", 4.9, true),
        chiro(4, "Dr. Samuel Ortiz", "Posture correction", "Eastgate Wellness", 4.3, false),
        chiro(5, "Dr. Priya Raman", "Pediatric care", "Harbor Chiropractic", 4.7, true),
    ]
}

/// Look a chiropractor up by id
pub fn chiropractor(id: ChiroId) -> Option<Chiropractor> {
    chiropractors().into_iter().find(|chiro| chiro.id == id)
}

/// Open booking slots
pub fn bookings() -> Vec<Booking> {
    let slot = |id: u32, chiro_id: u32, slot: &str| Booking {
        id: BookingId(id),
        chiro_id: ChiroId(chiro_id),
        slot: slot.to_string(),
    };
    vec![
        slot(101, 1, "Mon 09:30"),
        slot(102, 1, "Wed 14:00"),
        slot(201, 2, "Tue 11:15"),
        slot(301, 3, "Thu 08:45"),
        slot(501, 5, "Fri 16:30"),
    ]
}

/// Look a booking up by id
pub fn booking(id: BookingId) -> Option<Booking> {
    bookings().into_iter().find(|booking| booking.id == id)
}

/// First open slot for a chiropractor
pub fn first_booking_for(chiro_id: ChiroId) -> Option<Booking> {
    bookings().into_iter().find(|booking| booking.chiro_id == chiro_id)
}

/// Conversation list
pub fn conversations() -> Vec<ConversationPreview> {
    let preview = |id: &str, with: &str, last: &str, unread: u32| ConversationPreview {
        id: id.to_string(),
        with: with.to_string(),
        last_message: last.to_string(),
        unread,
    };
    vec![
        preview("c-okafor", "Dr. Amara Okafor", "See you Monday!", 1),
        preview("c-tanaka", "Dr. Mei Tanaka", "Try the stretches twice a day.", 2),
        preview("c-frontdesk", "Northside Front Desk", "Your invoice is ready.", 0),
    ]
}

/// Messages in a conversation, oldest first
pub fn messages(conversation_id: &str) -> Vec<ChatMessage> {
    let msg = |sender: &str, body: &str, from_patient: bool, sent_at: &str| ChatMessage {
        sender: sender.to_string(),
        body: body.to_string(),
        from_patient,
        sent_at: sent_at.to_string(),
    };
    match conversation_id {
        "c-okafor" => vec![
            msg("You", "Can I move my appointment to Monday?", true, "08:02"),
            msg("Dr. Amara Okafor", "See you Monday!", false, "08:40"),
        ],
        "c-tanaka" => vec![
            msg("You", "My lower back still feels stiff.", true, "17:10"),
            msg("Dr. Mei Tanaka", "That's normal after the first session.", false, "17:25"),
            msg("Dr. Mei Tanaka", "Try the stretches twice a day.", false, "17:26"),
        ],
        "c-frontdesk" => vec![msg("Northside Front Desk", "Your invoice is ready.", false, "12:00")],
        _ => Vec::new(),
    }
}
