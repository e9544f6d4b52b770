// outbound interfaces
//
// the site has exactly one network dependency, the email-delivery provider that relays
// contact form submissions.  everything in here is wire types plus the call itself, so
// that the form controller in common can build requests without touching the network
pub mod message;
