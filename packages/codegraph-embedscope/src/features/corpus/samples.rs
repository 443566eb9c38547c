//! Built-in demonstration corpus: short Python snippets covering functions,
//! classes, imports, loops, conditionals and exception handling.

/// `(label, source)` pairs in corpus order
pub const REFERENCE_SNIPPETS: [(&str, &str); 10] = [
    (
        "factorial",
        "def factorial(n):\n    return 1 if n==0 else n*factorial(n-1)",
    ),
    (
        "class_init",
        "class MyClass:\n    def __init__(self, x):\n        self.x = x",
    ),
    (
        "circle_area",
        "import math\n\ndef circle_area(r):\n    return math.pi * r ** 2",
    ),
    (
        "bubble_sort",
        "def bubble_sort(arr):\n    for i in range(len(arr)):\n        for j in range(len(arr)-i-1):\n            if arr[j] > arr[j+1]:\n                arr[j], arr[j+1] = arr[j+1], arr[j]",
    ),
    (
        "fibonacci",
        "def fibonacci(n):\n    a, b = 0, 1\n    for _ in range(n):\n        a, b = b, a+b\n    return a",
    ),
    ("empty_class", "class Vehicle:\n    pass"),
    (
        "current_time",
        "from datetime import datetime\n\ndef get_current_time():\n    return datetime.now()",
    ),
    ("is_even", "def is_even(num):\n    return num % 2 == 0"),
    ("greet", "def greet(name):\n    print(f'Hello, {name}!')"),
    (
        "zero_division",
        "try:\n    x = 1 / 0\nexcept ZeroDivisionError:\n    print('Cannot divide by zero')",
    ),
];
