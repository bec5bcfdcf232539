mod payment_dispatcher;

pub use payment_dispatcher::PaymentDispatcher;
