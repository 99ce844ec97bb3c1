/// Owner and contact details shown in the hero and contact sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Arindam Katoch",
    email: "your.email@example.com",
    github: "https://github.com/yourusername",
    tagline: "Creative Developer & Designer",
    bio: "Exploring the intersection of art, code, material and design through digital and physical spaces",
};

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
