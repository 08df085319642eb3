use heck::ToSnakeCase;

/// 由頁面類別名稱推導模板路徑，例如
/// `ImersaoDjangoLessonPage` -> `pages/imersao_django_lesson_page.html`
pub fn template_name(class_name: &str) -> String {
    format!("pages/{}.html", class_name.to_snake_case())
}
