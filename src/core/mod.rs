pub mod kinematics;
pub mod window;
