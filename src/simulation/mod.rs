pub mod states;
pub mod params;
pub mod kinematics;
pub mod tracker;
pub mod trail;
pub mod banked;
pub mod controls;
pub mod scenario;
