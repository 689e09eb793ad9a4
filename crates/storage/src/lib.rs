pub mod calendar;
pub mod history;
pub mod instructor;
pub mod staff;
pub mod treasury;
pub mod user;

use std::sync::Arc;

use calendar::CalendarStore;
use history::HistoryStore;
use instructor::InstructorStore;
use staff::StaffStore;
use treasury::TreasuryStore;
use user::ClientStore;

/// In-memory state of one gym. Lives as long as the process.
#[derive(Clone, Default)]
pub struct Storage {
    pub clients: Arc<ClientStore>,
    pub instructors: Arc<InstructorStore>,
    pub calendar: Arc<CalendarStore>,
    pub staff: Arc<StaffStore>,
    pub treasury: Arc<TreasuryStore>,
    pub history: Arc<HistoryStore>,
}

impl Storage {
    pub fn new() -> Self {
        Storage::default()
    }
}
