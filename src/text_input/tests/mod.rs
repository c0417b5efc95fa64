mod options;
mod registry;
mod state;
