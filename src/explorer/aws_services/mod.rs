pub mod cloudformation;
pub mod lambda;

pub use cloudformation::CloudFormationService;
pub use lambda::LambdaService;
