use crate::core::catalog::lookup;
use crate::domain::model::LessonNavigation;
use crate::utils::error::{PagesError, Result};

/// 取得目前、下一堂與上一堂影片。
///
/// 目前的課程不存在時回傳 [`PagesError::LessonNotFound`]；
/// 相鄰課程不存在（第 1 堂與第 7 堂的邊界）則是 `None`，不算錯誤。
pub fn resolve(lesson_number: i64) -> Result<LessonNavigation> {
    let video = lookup(lesson_number).ok_or_else(|| {
        tracing::debug!("Lesson {} is not in the catalog", lesson_number);
        PagesError::LessonNotFound {
            lesson: lesson_number,
        }
    })?;

    let next_video = lesson_number.checked_add(1).and_then(lookup);
    let previous_video = lesson_number.checked_sub(1).and_then(lookup);

    Ok(LessonNavigation {
        video,
        next_video,
        previous_video,
    })
}
