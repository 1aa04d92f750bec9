use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Lowercase, strip non-alphanumerics, hyphen-join.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
