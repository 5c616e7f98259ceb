pub mod body_stats;
pub mod dashboard_summary;
pub mod flash_message;
pub mod goals;
pub mod header;
pub mod login_form;
pub mod progress_chart;
pub mod register_form;
pub mod workout_history_table;
pub mod workout_log_form;

pub use body_stats::BodyStats;
pub use dashboard_summary::DashboardSummaryView;
pub use goals::Goals;
pub use header::Header;
pub use login_form::LoginForm;
pub use progress_chart::ProgressChart;
pub use register_form::RegisterForm;
pub use workout_history_table::WorkoutHistoryTable;
pub use workout_log_form::WorkoutLogForm;
