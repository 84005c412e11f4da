mod commit_command_output;
