mod interactive;
mod run;
