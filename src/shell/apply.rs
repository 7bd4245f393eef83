//! The careers application flow.
//!
//! Each listing carries a three-phase control: idle until the visitor
//! applies, submitting for a fixed delay, then locked into a terminal
//! submitted state for the remainder of the session. The transition is
//! one-shot and has no failure path once it starts.

use std::fmt;
use std::time::Duration;

/// How long a submission displays as in-flight before locking.
pub const APPLICATION_DELAY: Duration = Duration::from_secs(2);

/// The display phase of one listing's application control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyPhase {
    /// No application has been made.
    Idle,

    /// An application is in flight; the control is disabled.
    Submitting,

    /// The application went through; the control is locked for the session.
    Submitted,
}

/// Why an application could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The listing number does not exist.
    UnknownListing(usize),

    /// An application for this listing is already in flight.
    InFlight,

    /// An application for this listing already went through.
    AlreadySubmitted,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::UnknownListing(index) => {
                write!(f, "no listing #{}", index + 1)
            }
            ApplyError::InFlight => {
                write!(f, "application already transmitting")
            }
            ApplyError::AlreadySubmitted => {
                write!(f, "application already received; listing locked")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Per-listing application state for one session.
#[derive(Debug)]
pub struct CareersBoard {
    phases: Vec<ApplyPhase>,
}

impl CareersBoard {
    /// Creates a board with every listing idle.
    pub fn new(listings: usize) -> Self {
        Self {
            phases: vec![ApplyPhase::Idle; listings],
        }
    }

    /// The phase of the given listing.
    pub fn phase(&self, index: usize) -> Option<ApplyPhase> {
        self.phases.get(index).copied()
    }

    /// Number of listings that reached the submitted state.
    pub fn submitted_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| **phase == ApplyPhase::Submitted)
            .count()
    }

    /// Moves a listing from idle to submitting.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing does not exist or is not idle; the
    /// board is unchanged in that case.
    pub fn begin(&mut self, index: usize) -> Result<(), ApplyError> {
        match self.phases.get(index) {
            None => Err(ApplyError::UnknownListing(index)),
            Some(ApplyPhase::Submitting) => Err(ApplyError::InFlight),
            Some(ApplyPhase::Submitted) => Err(ApplyError::AlreadySubmitted),
            Some(ApplyPhase::Idle) => {
                self.phases[index] = ApplyPhase::Submitting;
                Ok(())
            }
        }
    }

    /// Locks a submitting listing into the submitted state.
    fn complete(&mut self, index: usize) {
        debug_assert_eq!(self.phases.get(index), Some(&ApplyPhase::Submitting));
        if let Some(phase) = self.phases.get_mut(index) {
            *phase = ApplyPhase::Submitted;
        }
    }

    /// Runs the full transition for one listing: idle, submitting for the
    /// fixed delay, then locked submitted.
    ///
    /// # Errors
    ///
    /// Fails only before the transition starts (unknown listing, or a
    /// listing that is not idle). Once submitting, the listing always
    /// reaches the submitted state after [`APPLICATION_DELAY`].
    pub async fn submit(&mut self, index: usize) -> Result<(), ApplyError> {
        self.begin(index)?;
        tokio::time::sleep(APPLICATION_DELAY).await;
        self.complete(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio_test::task;
    use tokio_test::{assert_pending, assert_ready};

    #[test]
    fn begin_moves_idle_to_submitting() {
        let mut board = CareersBoard::new(3);
        assert_eq!(board.phase(0), Some(ApplyPhase::Idle));
        board.begin(0).unwrap();
        assert_eq!(board.phase(0), Some(ApplyPhase::Submitting));
        // Other listings are untouched.
        assert_eq!(board.phase(1), Some(ApplyPhase::Idle));
    }

    #[test]
    fn begin_rejects_inflight_and_submitted() {
        let mut board = CareersBoard::new(1);
        board.begin(0).unwrap();
        assert_eq!(board.begin(0), Err(ApplyError::InFlight));
        board.complete(0);
        assert_eq!(board.begin(0), Err(ApplyError::AlreadySubmitted));
        assert_eq!(board.phase(0), Some(ApplyPhase::Submitted));
    }

    #[test]
    fn begin_rejects_unknown_listing() {
        let mut board = CareersBoard::new(2);
        assert_eq!(board.begin(7), Err(ApplyError::UnknownListing(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn submission_locks_after_fixed_delay() {
        let mut board = CareersBoard::new(3);
        {
            let mut submission = task::spawn(board.submit(1));
            assert_pending!(submission.poll());
            tokio::time::advance(APPLICATION_DELAY).await;
            assert_ready!(submission.poll()).unwrap();
        }
        assert_eq!(board.phase(1), Some(ApplyPhase::Submitted));
        assert_eq!(board.submitted_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_listing_stays_locked() {
        let mut board = CareersBoard::new(1);
        board.submit(0).await.unwrap();
        assert_eq!(board.submit(0).await, Err(ApplyError::AlreadySubmitted));
        assert_eq!(board.phase(0), Some(ApplyPhase::Submitted));
    }
}
