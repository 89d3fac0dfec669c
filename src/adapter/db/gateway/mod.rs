pub mod education;
pub mod profile;
pub mod skill;
pub mod value;
pub mod work_experience;
