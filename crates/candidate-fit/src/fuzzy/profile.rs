/// Projects beyond this count no longer raise the profile strength.
pub const PROJECT_CAP: u32 = 5;

/// Folds the academic score (0-10 scale) and project count into `profile_strength`.
///
/// Half of the range comes from the CGPA and half from projects. Values outside
/// the nominal CGPA scale are not rejected and flow through arithmetically.
pub fn aggregate(cgpa: f64, projects: u32) -> f64 {
    let cgpa_score = (cgpa / 10.0) * 5.0;
    let project_score = f64::from(projects.min(PROJECT_CAP));
    cgpa_score + project_score
}
