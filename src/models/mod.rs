pub mod equipment;
pub mod policy;
pub mod report;
pub mod time_entry;
pub mod work_order;

pub use equipment::EquipmentRecord;
pub use policy::{FilterOrder, MasterDuplicates, PlannedMatch, TieBreak};
pub use report::{ChartBar, Kpi, Report, ReportRow};
pub use time_entry::{Assignment, TimeEntry};
pub use work_order::WorkOrder;
