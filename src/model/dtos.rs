/// Common parameters for course-list requests
#[derive(Debug, Clone)]
pub struct CourseListParams {
    pub endpoint: String,
}
