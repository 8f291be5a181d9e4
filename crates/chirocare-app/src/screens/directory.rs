//! Chiropractor directory, profile and booking screens

use chirocare_nav::{BookingId, ChiroId, NavAction, Route};

use crate::data::{self, Booking, Chiropractor};

/// Searchable chiropractor listing
#[derive(Debug, Clone, PartialEq)]
pub struct ChiroDirectoryScreen {
    chiropractors: Vec<Chiropractor>,
    query: String,
}

impl Default for ChiroDirectoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChiroDirectoryScreen {
    /// Listing over the sample directory
    pub fn new() -> Self {
        Self::with_chiropractors(data::chiropractors())
    }

    /// Listing over a given set of records
    pub fn with_chiropractors(chiropractors: Vec<Chiropractor>) -> Self {
        Self {
            chiropractors,
            query: String::new(),
        }
    }

    /// Set the search query
    pub fn filter(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    /// Current query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records matching the query by name, specialty or clinic
    pub fn visible(&self) -> Vec<&Chiropractor> {
        self.chiropractors
            .iter()
            .filter(|chiro| {
                self.query.is_empty()
                    || [&chiro.name, &chiro.specialty, &chiro.clinic]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&self.query))
            })
            .collect()
    }

    /// Open a profile. `None` if `id` is not currently listed.
    pub fn select(&self, id: ChiroId) -> Option<NavAction> {
        self.visible()
            .iter()
            .any(|chiro| chiro.id == id)
            .then(|| NavAction::push(Route::ChiroProfile { id }))
    }
}

/// One chiropractor's profile
#[derive(Debug, Clone, PartialEq)]
pub struct ChiroProfileScreen {
    id: ChiroId,
    chiropractor: Option<Chiropractor>,
}

impl ChiroProfileScreen {
    /// Profile for `id`; renders a "not found" state if unknown
    pub fn new(id: ChiroId) -> Self {
        Self {
            id,
            chiropractor: data::chiropractor(id),
        }
    }

    /// Requested id
    pub fn id(&self) -> ChiroId {
        self.id
    }

    /// Record, if the id is known
    pub fn chiropractor(&self) -> Option<&Chiropractor> {
        self.chiropractor.as_ref()
    }

    /// Book the first open slot. `None` when unknown, not accepting
    /// patients, or fully booked.
    pub fn book(&self) -> Option<NavAction> {
        let chiro = self.chiropractor.as_ref()?;
        if !chiro.accepting_patients {
            return None;
        }
        let booking = data::first_booking_for(chiro.id)?;
        Some(NavAction::push(Route::Booking { id: booking.id }))
    }
}

/// Booking confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct BookingScreen {
    id: BookingId,
    booking: Option<Booking>,
    chiropractor: Option<Chiropractor>,
}

impl BookingScreen {
    /// Confirmation for `id`
    pub fn new(id: BookingId) -> Self {
        let booking = data::booking(id);
        let chiropractor = booking
            .as_ref()
            .and_then(|booking| data::chiropractor(booking.chiro_id));
        Self {
            id,
            booking,
            chiropractor,
        }
    }

    /// Requested id
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Booking record, if the id is known
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Chiropractor the booking is with
    pub fn chiropractor(&self) -> Option<&Chiropractor> {
        self.chiropractor.as_ref()
    }

    /// Return to the dashboard, dropping the booking flow from history
    pub fn done(&self) -> NavAction {
        NavAction::Reset(Route::Home)
    }
}
