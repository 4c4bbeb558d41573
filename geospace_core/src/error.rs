/// Errors produced while building discs, talking to the geometry engine and decoding its output.
#[derive(Debug, thiserror::Error)]
pub enum GeospaceError {
	/// Degenerate input: empty or too short coordinate sequences, non-positive radius, too few disc steps.
	#[error("invalid input: {0}")]
	Input(String),

	/// A fault raised inside the geometry engine, converted into an ordinary error.
	#[error("geometry engine fault: {message}")]
	EngineFault { message: String, context: String },

	/// The engine returned a shape that cannot be decoded into boundary points.
	#[error("unsupported geometry type: {0}")]
	GeometryType(String),

	/// A coordinate token in engine output could not be read.
	#[error("cannot parse '{token}': {reason}")]
	Parse { token: String, reason: String },

	/// An iterative geodesic solution did not settle within its iteration cap.
	#[error("geodesic iteration did not converge after {iterations} iterations")]
	Convergence { iterations: usize },
}

impl GeospaceError {
	pub fn input(msg: impl Into<String>) -> Self {
		Self::Input(msg.into())
	}

	pub fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Parse {
			token: token.into(),
			reason: reason.into(),
		}
	}

	/// Builds an [`GeospaceError::EngineFault`], capturing a backtrace of the call site as context.
	pub fn engine_fault(message: impl Into<String>) -> Self {
		Self::EngineFault {
			message: message.into(),
			context: std::backtrace::Backtrace::capture().to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, GeospaceError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(
			GeospaceError::input("boundary is empty").to_string(),
			"invalid input: boundary is empty"
		);
		assert_eq!(
			GeospaceError::parse("26.x", "invalid float literal").to_string(),
			"cannot parse '26.x': invalid float literal"
		);
		assert_eq!(
			GeospaceError::Convergence { iterations: 200 }.to_string(),
			"geodesic iteration did not converge after 200 iterations"
		);
		assert_eq!(
			GeospaceError::GeometryType("POINT".into()).to_string(),
			"unsupported geometry type: POINT"
		);
	}

	#[test]
	fn engine_fault_keeps_message() {
		let err = GeospaceError::engine_fault("ring is not closed");
		assert!(matches!(&err, GeospaceError::EngineFault { message, .. } if message == "ring is not closed"));
		assert_eq!(err.to_string(), "geometry engine fault: ring is not closed");
	}
}
