mod beam;
mod satellite;
mod transponder;
