pub mod assumptions;
pub mod results;
pub mod wizard;

pub use assumptions::AssumptionsPage;
pub use results::ResultsStep;
pub use wizard::WizardPage;
