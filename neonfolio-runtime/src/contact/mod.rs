// Neonfolio contact form
//
// The form controller owns field values and the submit status and hands
// validated messages to a `ContactTransport`:
//
// ```text
// ContactForm ──send──> ContactTransport
//                          ├── SimulatedTransport  (waits, then succeeds)
//                          └── MockTransport       (tests: scripted outcomes)
// ```
//
// Usage:
// ```ignore
// let form = ContactForm::simulated(config.contact.clone());
// form.set_field(ContactField::Name, "Ada");
// // ...
// form.submit().await?;
// ```

mod error;
mod form;
mod mock;
mod transport;

pub use error::{ContactError, ContactResult};
pub use form::{ContactForm, ContactState};
pub use mock::MockTransport;
pub use transport::{ContactTransport, SimulatedTransport};
