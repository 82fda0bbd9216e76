mod invalid_arguments_are_rejected;
