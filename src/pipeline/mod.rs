pub mod stage1_score;
pub mod stage2_classify;
pub mod stage3_report;
