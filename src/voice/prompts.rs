//! Spoken prompt catalog.
//!
//! The Chinese phrases the session console speaks, centralized so the
//! controller and tests share one source of truth for prompt text.

use crate::models::CookingTask;

/// Spoken when the session starts.
pub fn session_started() -> String {
    "烹饪开始，请按照步骤操作".to_string()
}

/// Spoken when the clock is paused.
pub fn session_paused() -> String {
    "烹饪已暂停".to_string()
}

/// Spoken when the clock resumes.
pub fn session_resumed() -> String {
    "继续烹饪".to_string()
}

/// Spoken when the session completes.
pub fn session_completed() -> String {
    "恭喜，所有菜品已完成".to_string()
}

/// Announces the current step and its expected duration.
pub fn current_step(task: &CookingTask) -> String {
    format!("当前步骤：{}，预计{}分钟", task.name, task.duration)
}

/// Answers a remaining-time query.
pub fn remaining_time(minutes: i64) -> String {
    format!("还需要约{minutes}分钟")
}

/// Answers a temperature query for the current step.
pub fn current_temperature(celsius: i64) -> String {
    format!("当前步骤温度约{celsius}度")
}

/// Announces that a step is starting.
pub fn step_started(task: &CookingTask) -> String {
    format!("开始{}", task.name)
}

/// Reminds how long a running step still has.
pub fn step_reminder(task: &CookingTask, remaining_minutes: i64) -> String {
    format!("请注意，{}还有{}分钟", task.name, remaining_minutes)
}

/// Announces that a step finished.
pub fn step_completed(task: &CookingTask) -> String {
    format!("{}已完成，请进行下一步", task.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_prompts() {
        let task = CookingTask::new("t1", "焯水", 5);
        assert_eq!(current_step(&task), "当前步骤：焯水，预计5分钟");
        assert_eq!(step_started(&task), "开始焯水");
        assert_eq!(step_reminder(&task, 3), "请注意，焯水还有3分钟");
        assert_eq!(step_completed(&task), "焯水已完成，请进行下一步");
    }

    #[test]
    fn test_query_prompts() {
        assert_eq!(remaining_time(42), "还需要约42分钟");
        assert_eq!(current_temperature(180), "当前步骤温度约180度");
    }
}
